#![forbid(unsafe_code)]

#[derive(Debug)]
pub enum StoreError {
    Io(std::io::Error),
    Json(serde_json::Error),
    InvalidRecord(&'static str),
}

impl std::fmt::Display for StoreError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Io(err) => write!(f, "io: {err}"),
            Self::Json(err) => write!(f, "json: {err}"),
            Self::InvalidRecord(message) => write!(f, "invalid record: {message}"),
        }
    }
}

impl std::error::Error for StoreError {}

impl From<std::io::Error> for StoreError {
    fn from(value: std::io::Error) -> Self {
        Self::Io(value)
    }
}

impl From<serde_json::Error> for StoreError {
    fn from(value: serde_json::Error) -> Self {
        Self::Json(value)
    }
}

#[derive(Debug)]
pub enum EngineError {
    TaskNotFound {
        id: String,
    },
    ParentNotFound {
        id: String,
    },
    TodoNotFound {
        task_id: String,
        id: String,
    },
    SelfLink {
        id: String,
    },
    InvalidStatus {
        status: String,
    },
    Cycle {
        task_id: String,
        parent_id: String,
    },
    /// The proposed parent's ancestor chain revisits an id before reaching
    /// a root: the stored data already contains a cycle.
    AncestryCorrupt {
        parent_id: String,
        ancestor_id: String,
    },
    /// The proposed parent's ancestor chain references a record that does
    /// not exist in storage.
    AncestryBroken {
        parent_id: String,
        missing_id: String,
    },
    Store(StoreError),
}

impl std::fmt::Display for EngineError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::TaskNotFound { id } => write!(f, "task not found (id={id})"),
            Self::ParentNotFound { id } => write!(f, "parent task not found (id={id})"),
            Self::TodoNotFound { task_id, id } => {
                write!(f, "todo not found (task={task_id}, id={id})")
            }
            Self::SelfLink { id } => write!(f, "cannot link a task to itself (id={id})"),
            Self::InvalidStatus { status } => write!(f, "invalid status '{status}'"),
            Self::Cycle { task_id, parent_id } => {
                write!(f, "link would create a cycle (task={task_id}, parent={parent_id})")
            }
            Self::AncestryCorrupt {
                parent_id,
                ancestor_id,
            } => write!(
                f,
                "ancestor chain already cyclic (parent={parent_id}, revisits={ancestor_id})"
            ),
            Self::AncestryBroken {
                parent_id,
                missing_id,
            } => write!(
                f,
                "ancestor chain broken (parent={parent_id}, missing={missing_id})"
            ),
            Self::Store(err) => write!(f, "store: {err}"),
        }
    }
}

impl std::error::Error for EngineError {}

impl From<StoreError> for EngineError {
    fn from(value: StoreError) -> Self {
        Self::Store(value)
    }
}
