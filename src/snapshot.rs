pub mod cache;
pub mod factory;
pub mod source;

// Selects where the raw snapshot is fetched from; Fixture serves a bundled
// payload for local development and tests.
#[derive(Debug, PartialEq, Clone, Copy)]
pub(crate) enum SnapshotOrigin {
    Http,
    Fixture,
}
