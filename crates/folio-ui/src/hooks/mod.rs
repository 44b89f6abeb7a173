//! Hooks binding folio-core timers to component lifetimes

mod frame;
mod particles;
mod task_scope;
mod typewriter;

pub use frame::use_frame_loop;
pub use particles::{use_particle_emitter, ParticleEmitter};
pub use task_scope::use_task_scope;
pub use typewriter::{use_typewriter, TypewriterHandle};
