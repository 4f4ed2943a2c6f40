mod genres;

pub use genres::AlbumGenreManager;
