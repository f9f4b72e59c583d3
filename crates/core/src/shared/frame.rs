use ndarray::{ArrayView3, ArrayViewMut3};

/// A single captured frame: contiguous RGB bytes in row-major order.
///
/// Acquisition owns the frame for one loop iteration; nothing downstream
/// retains it. Format conversion happens at I/O boundaries only.
#[derive(Clone, Debug)]
pub struct Frame {
    data: Vec<u8>,
    width: u32,
    height: u32,
    channels: u8,
    index: usize,
}

impl Frame {
    pub fn new(data: Vec<u8>, width: u32, height: u32, channels: u8, index: usize) -> Self {
        debug_assert_eq!(
            data.len(),
            (width as usize) * (height as usize) * (channels as usize),
            "data length must equal width * height * channels"
        );
        Self {
            data,
            width,
            height,
            channels,
            index,
        }
    }

    pub fn data(&self) -> &[u8] {
        &self.data
    }

    pub fn data_mut(&mut self) -> &mut [u8] {
        &mut self.data
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn channels(&self) -> u8 {
        self.channels
    }

    pub fn index(&self) -> usize {
        self.index
    }

    pub fn as_ndarray(&self) -> ArrayView3<'_, u8> {
        ArrayView3::from_shape(self.shape(), &self.data)
            .expect("Frame data length must match dimensions")
    }

    pub fn as_ndarray_mut(&mut self) -> ArrayViewMut3<'_, u8> {
        ArrayViewMut3::from_shape(self.shape(), &mut self.data)
            .expect("Frame data length must match dimensions")
    }

    /// Nearest-neighbor downscale by an integer factor.
    ///
    /// Produces the working frame detection runs on; detection coordinates
    /// come back in this frame's space and must be multiplied by `factor`
    /// before drawing on the original. A factor of 1 is a plain copy.
    pub fn downscale(&self, factor: u32) -> Frame {
        assert!(factor >= 1, "downscale factor must be >= 1");
        let new_w = self.width / factor;
        let new_h = self.height / factor;
        let channels = self.channels as usize;

        let src = self.as_ndarray();
        let mut data = Vec::with_capacity(new_w as usize * new_h as usize * channels);
        for row in 0..new_h as usize {
            for col in 0..new_w as usize {
                for c in 0..channels {
                    data.push(src[[row * factor as usize, col * factor as usize, c]]);
                }
            }
        }

        Frame::new(data, new_w, new_h, self.channels, self.index)
    }

    fn shape(&self) -> (usize, usize, usize) {
        (
            self.height as usize,
            self.width as usize,
            self.channels as usize,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_construction_and_accessors() {
        let data = vec![0u8; 12]; // 2x2x3
        let frame = Frame::new(data.clone(), 2, 2, 3, 5);
        assert_eq!(frame.width(), 2);
        assert_eq!(frame.height(), 2);
        assert_eq!(frame.channels(), 3);
        assert_eq!(frame.index(), 5);
        assert_eq!(frame.data(), &data[..]);
    }

    #[test]
    fn test_data_mut_allows_modification() {
        let data = vec![0u8; 6]; // 2x1x3
        let mut frame = Frame::new(data, 2, 1, 3, 0);
        frame.data_mut()[0] = 255;
        assert_eq!(frame.data()[0], 255);
    }

    #[test]
    #[should_panic(expected = "data length must equal width * height * channels")]
    fn test_mismatched_data_length_panics_in_debug() {
        let data = vec![0u8; 10]; // wrong size for 2x2x3
        Frame::new(data, 2, 2, 3, 0);
    }

    #[test]
    fn test_as_ndarray_shape() {
        let data = vec![0u8; 24]; // 2x4x3
        let frame = Frame::new(data, 4, 2, 3, 0);
        let arr = frame.as_ndarray();
        assert_eq!(arr.shape(), &[2, 4, 3]); // (height, width, channels)
    }

    #[test]
    fn test_as_ndarray_mut_modification() {
        let data = vec![0u8; 12]; // 2x2x3
        let mut frame = Frame::new(data, 2, 2, 3, 0);
        {
            let mut arr = frame.as_ndarray_mut();
            arr[[0, 1, 2]] = 128; // row=0, col=1, B channel
        }
        assert_eq!(frame.as_ndarray()[[0, 1, 2]], 128);
    }

    #[test]
    fn test_downscale_dimensions() {
        let frame = Frame::new(vec![0u8; 8 * 4 * 3], 8, 4, 3, 7);
        let quarter = frame.downscale(4);
        assert_eq!(quarter.width(), 2);
        assert_eq!(quarter.height(), 1);
        assert_eq!(quarter.channels(), 3);
        assert_eq!(quarter.index(), 7);
    }

    #[test]
    fn test_downscale_samples_top_left_of_each_block() {
        // 4x2 grayscale-ish frame, 1 channel: values equal column index
        let data: Vec<u8> = (0..2).flat_map(|_| 0..4u8).collect();
        let frame = Frame::new(data, 4, 2, 1, 0);
        let half = frame.downscale(2);
        assert_eq!(half.width(), 2);
        assert_eq!(half.height(), 1);
        // picks columns 0 and 2 of row 0
        assert_eq!(half.data(), &[0, 2]);
    }

    #[test]
    fn test_downscale_factor_one_is_identity() {
        let data = vec![9u8; 12];
        let frame = Frame::new(data.clone(), 2, 2, 3, 0);
        let same = frame.downscale(1);
        assert_eq!(same.data(), &data[..]);
        assert_eq!(same.width(), 2);
        assert_eq!(same.height(), 2);
    }

    #[test]
    fn test_downscale_truncates_odd_dimensions() {
        let frame = Frame::new(vec![0u8; 5 * 3 * 3], 5, 3, 3, 0);
        let half = frame.downscale(2);
        assert_eq!(half.width(), 2);
        assert_eq!(half.height(), 1);
    }
}
