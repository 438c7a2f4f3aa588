mod arc_shared;

pub use arc_shared::ArcShared;
