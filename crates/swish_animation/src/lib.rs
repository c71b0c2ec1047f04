//! Swish Animation
//!
//! Per-widget property tweens driven by a batched scheduler.
//!
//! # Features
//!
//! - **Property Channels**: Translation, scale, rotation, tint, opacity,
//!   visibility and canvas position, each independently enabled
//! - **Easing**: Standard curves plus parameterized back, elastic and power curves
//! - **Batched Scheduler**: Creation is deferred to the tick boundary, so
//!   callbacks can start new tweens while a tick is in progress
//! - **Weak Targets**: Tweens never keep their widget alive and complete
//!   quietly when it goes away
//! - **Presets**: Serializable, callback-free tween descriptions
//!
//! # Example
//!
//! ```rust
//! use std::cell::RefCell;
//! use std::rc::Rc;
//! use swish_animation::{Easing, SchedulerConfig, TweenScheduler};
//! use swish_core::Widget;
//!
//! let mut scheduler = TweenScheduler::new(SchedulerConfig::standard());
//! scheduler.startup();
//!
//! let panel = Rc::new(RefCell::new(Widget::new("panel")));
//! scheduler
//!     .create(&panel, 1.0, 0.0, false)
//!     .unwrap()
//!     .opacity(0.0)
//!     .easing(Easing::Linear);
//!
//! scheduler.tick(0.0); // promote
//! scheduler.tick(0.5);
//! assert!((panel.borrow().render_opacity - 0.5).abs() < 1e-6);
//! ```

pub mod builder;
pub mod channel;
pub mod config;
pub mod easing;
pub mod error;
pub mod instance;
pub mod preset;
pub mod scheduler;
pub mod values;

pub use builder::TweenBuilder;
pub use channel::{PropertyChannel, VisibilityChannel, VisibilitySwitch};
pub use config::SchedulerConfig;
pub use easing::{ease, Easing};
pub use error::{Result, TweenError};
pub use instance::{CompleteCallback, StartCallback, TweenInstance, TweenState, UpdateCallback};
pub use preset::TweenPreset;
pub use scheduler::{TweenId, TweenScheduler};
pub use values::Interpolate;
