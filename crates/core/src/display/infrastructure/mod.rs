pub mod annotated_image_sink;
mod rasterize;
