pub mod analog;
pub mod event;
pub mod mapping;

pub use analog::{AnalogMapping, AxisTransform, StickAxis, StickState};
pub use mapping::{translate, GamepadInput, Output};
