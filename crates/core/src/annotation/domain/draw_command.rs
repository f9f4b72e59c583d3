/// One overlay drawing instruction in display-space pixel coordinates.
///
/// Commands carry no clamping guarantees; coordinates may fall outside the
/// frame and the sink clips them at draw time.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DrawCommand {
    /// 1px rectangle outline.
    Rect {
        left: i32,
        top: i32,
        right: i32,
        bottom: i32,
        color: [u8; 3],
    },
    /// Small filled dot centered on `(x, y)`.
    Dot { x: i32, y: i32, color: [u8; 3] },
}
