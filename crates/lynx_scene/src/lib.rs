//! Scene level types of the lynx engine
//!
//! Game objects are stored in a [`World`] and addressed with an [`ObjectHandle`], each of them owns a [`Transform`] and
//! optionally an animation component. The [`Camera`] produces the view and projection matrices used to render the world.

use lynx_logging::LogCategory;

mod transform;
pub use transform::*;

mod camera;
pub use camera::*;

mod world;
pub use world::*;

const LOG_CAT : LogCategory = LogCategory::new("Scene");
