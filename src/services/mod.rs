pub mod figure_factory;
pub mod frame_capture;

pub use figure_factory::RandomFigureFactory;
pub use frame_capture::FrameCapture;
