mod landing;
pub use landing::{root_class, Landing};

mod sections;
pub use sections::{About, Community, Courses, Footer, Hero, Newsletter, Stats, Workshops};
