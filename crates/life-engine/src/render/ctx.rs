/// Device handles a renderer needs to build and feed its pipeline.
pub struct RenderCtx<'a> {
    pub device: &'a wgpu::Device,
    pub queue: &'a wgpu::Queue,
    /// Format of the surface being drawn to; pipelines are keyed on it.
    pub format: wgpu::TextureFormat,
}

/// Encoder and colour attachment for the frame in flight.
pub struct RenderTarget<'a> {
    pub encoder: &'a mut wgpu::CommandEncoder,
    pub view: &'a wgpu::TextureView,
}
