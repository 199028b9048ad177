pub mod resolver;

pub use resolver::{IterativeResolver, ResolverLimits, TraceRecorder};
