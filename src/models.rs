//! Public rock and fluid physics models.
//!
//! Models are the primary public interface of this crate.
//!
//! # Organization
//!
//! Models are grouped by the physics they describe (`fluid`, `seismic`,
//! `elastic`).
//!
//! # Model structure
//!
//! Each model lives in its own module and contains an internal `core` submodule
//! where the actual computation and domain logic lives. The `core` module is an
//! implementation detail and is **not** re-exported as part of the public API.
//!
//! Each model module exposes plain functions over the core API plus a
//! [`twine_core::Model`] implementation that is a thin adapter over the same
//! core. All models are stateless and their calls are pure.

pub mod elastic;
pub mod fluid;
pub mod seismic;
