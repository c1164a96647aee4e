//! Model-driven seats.
//!
//! - **Encoding**: [`ObservationEncoder`] turns a seat's [`GameInfo`] and
//!   held card into an [`EncodedState`]; [`DuelEncoder`] is the 54-feature
//!   head-to-head layout.
//! - **Networks**: [`PolicyNetwork`] scores every action code;
//!   [`LinearNetwork`] is a single dense layer.
//! - **Seat**: [`NetworkPolicy`] plays the best-scoring legal code.
//!
//! ```rust,ignore
//! use skyjo_engine::nn::{DuelEncoder, LinearNetwork, NetworkPolicy};
//!
//! let network = LinearNetwork::random(DuelEncoder::FEATURES, &mut rng);
//! let seat = NetworkPolicy::new(DuelEncoder, network);
//! ```
//!
//! [`GameInfo`]: crate::policy::GameInfo

pub mod encoder;
pub mod policy;
pub mod traits;

pub use encoder::{normalize_card, DuelEncoder, ObservationEncoder};
pub use policy::{masked_argmax, NetworkPolicy};
pub use traits::{EncodedState, LinearNetwork, PolicyNetwork};
