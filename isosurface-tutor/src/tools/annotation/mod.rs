//! Hand-built contours: points on cube edges and lines between them.
//!
//! The pointer state machine lives in [`controller`] and is independent of
//! Bevy's scheduling; [`input`] is the only system that drives it from
//! window events. Annotations are kept per dataset and swapped when the
//! active example changes.
//!
//! ## Controls
//!
//! | Input | Over | Effect |
//! |---|---|---|
//! | Ctrl + click | edge | place a point at the previewed position |
//! | Ctrl + drag | point | draw a line, committed when released over another point |
//! | Ctrl + Shift + click | point or line | delete it |
//! | drag without Ctrl | anywhere | orbit the camera |

use bevy::prelude::*;

pub mod controller;
pub mod input;
pub mod ray;
pub mod registry;
pub mod store;

use controller::InteractionController;
use ray::AnalyticRayCaster;

pub struct AnnotationToolPlugin;

impl Plugin for AnnotationToolPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<InteractionController>()
            .init_resource::<AnalyticRayCaster>();
    }
}
