mod input;

pub use input::InputCmd;
