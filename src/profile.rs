#[derive(Copy, Clone, Default, Debug, PartialEq, Eq)]
pub struct Profile {
    pub camera_rays: usize, // all primary rays
    pub shadow_rays: usize, // all rays used to test visibility of the light
    pub hits: usize,        // primary rays that hit an element
    pub shadowed: usize,    // hits that turned out to be occluded
}

impl Profile {
    pub fn new(camera_rays: usize, shadow_rays: usize, hits: usize, shadowed: usize) -> Self {
        Profile {
            camera_rays,
            shadow_rays,
            hits,
            shadowed,
        }
    }
    pub fn combine(&self, other: Self) -> Self {
        Profile::new(
            self.camera_rays + other.camera_rays,
            self.shadow_rays + other.shadow_rays,
            self.hits + other.hits,
            self.shadowed + other.shadowed,
        )
    }

    pub fn pretty_print(&self, elapsed: f32, threads: usize) {
        let &Profile {
            camera_rays,
            shadow_rays,
            hits,
            shadowed,
        } = self;
        let sum = camera_rays + shadow_rays;
        info!(
            "{} total camera rays at {} per second",
            camera_rays,
            camera_rays as f32 / elapsed
        );
        info!(
            "{} total shadow rays at {} per second",
            shadow_rays,
            shadow_rays as f32 / elapsed
        );
        info!("{} hits, {} of which were in shadow", hits, shadowed);
        info!(
            "{} total rays at {} per second and {} per second per thread",
            sum,
            sum as f32 / elapsed,
            sum as f32 / elapsed / (threads as f32)
        );
    }
}
