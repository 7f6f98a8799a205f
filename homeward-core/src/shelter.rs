//! Shelters: the nodes of the facility network.

/// A rescue facility participating in the transport network.
///
/// The graph engines only see shelter identifiers; capacity travels with the
/// snapshot for the surrounding logistics layer.
///
/// # Examples
/// ```
/// use homeward_core::Shelter;
///
/// let hub = Shelter::new("H", "Central Hub", 40);
/// assert_eq!(hub.id, "H");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Shelter {
    /// Unique identifier; the node id used by the graph engines.
    pub id: String,
    /// Display name.
    pub name: String,
    /// Number of dogs the facility can hold.
    pub capacity: u32,
}

impl Shelter {
    /// Construct a shelter.
    pub fn new(id: impl Into<String>, name: impl Into<String>, capacity: u32) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            capacity,
        }
    }
}
