mod make_path;
mod make_segment;

pub use make_path::MakePath;
pub use make_segment::MakeSegment;
