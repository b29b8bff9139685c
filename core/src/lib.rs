pub mod diagnostic;
pub mod probes;
pub mod system;
