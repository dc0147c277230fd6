//! Fragmentation engine: shatter effects for wireframe geometry.
//!
//! A shatter splits a [`LineSegmentSet`](crate::geometry::LineSegmentSet) into
//! exclusive fragments of mixed size (scattered small/medium/large picks plus
//! spatially contiguous strips), then moves, spins and fades each fragment
//! every tick until it drops below the visibility threshold.

pub mod animator;
pub mod fragment;
pub mod selection;
pub mod shatter;
pub mod spin;

pub use animator::{Animation, Animator, TickStatus};
pub use fragment::{ticks_to_fade, Age, Fragment, Motion};
pub use selection::{SegmentPool, SizeClass};
pub use shatter::{shatter, ShatterConfig, ShatterEffect};
pub use spin::Spin;
