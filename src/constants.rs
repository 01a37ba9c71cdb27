pub mod pagination {

    pub const DEFAULT_PAGE: i64 = 1;

    pub const DEFAULT_PAGE_SIZE: i64 = 50;

    pub const DEFAULT_SORT: &str = "asc";
}

pub mod fields {

    /// Columns exposed by the list-shaped endpoints.
    pub const MOVIE_LIST: &[&str] = &[
        "movie_id",
        "imdb_id",
        "title",
        "genres",
        "release_date",
        "budget",
    ];

    /// Columns exposed by the details endpoint.
    pub const MOVIE_DETAILS: &[&str] = &[
        "movie_id",
        "imdb_id",
        "title",
        "overview",
        "production_companies",
        "release_date",
        "budget",
        "runtime",
        "language",
        "genres",
        "status",
    ];
}
