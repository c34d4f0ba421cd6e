pub trait ImageView {
    type Pixel: Copy;

    fn width(&self) -> usize;
    fn height(&self) -> usize;

    fn row(&self, y: usize) -> &[Self::Pixel];

    /// Same `width × height` as `other`.
    fn same_size<O: ImageView>(&self, other: &O) -> bool {
        self.width() == other.width() && self.height() == other.height()
    }
}

pub trait ImageViewMut: ImageView {
    fn row_mut(&mut self, y: usize) -> &mut [Self::Pixel];
}
