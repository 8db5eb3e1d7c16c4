use crate::image_pipeline::bmp::types::Pixel;

pub trait PixelTransform {
    fn transform_row(&self, row: &mut [Pixel]);
}
