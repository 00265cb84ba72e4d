mod error;
mod interval;
mod rng;
mod sampler;
mod seeded;
mod thread_random;

pub use crate::error::*;
pub use crate::interval::*;
pub use crate::rng::*;
pub use crate::sampler::*;
pub use crate::seeded::*;
pub use crate::thread_random::*;
