// External collaborators and persistence

pub mod api;
pub mod storage;
