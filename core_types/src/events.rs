/// Progress of a menu selection, reported by the content service.
#[derive(Debug, Clone, PartialEq)]
pub enum ContentEvent {
    Loading { entry_id: String, token: u64 },
    Loaded { entry_id: String, token: u64 },
    Failed { entry_id: String, token: u64, error: String },
    // a later selection was made before this one finished
    Superseded { entry_id: String, token: u64 },
}
