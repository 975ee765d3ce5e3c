pub mod limits {

    pub const TRENDING_TITLES: usize = 10;

    pub const RECOMMENDED_TITLES: usize = 10;

    pub const SIMILAR_TITLES: usize = 6;
}

pub mod server {

    pub const DEFAULT_PORT: u16 = 5000;
}
