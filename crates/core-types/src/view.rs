/// Static description of a read-only database view.
///
/// Every record type declares the view it is read from, its primary key and
/// the ordered list of columns it exposes. The column list drives both the
/// SELECT statement and the JSON shape, so it must match the struct's fields
/// one-to-one and in the same order.
pub trait View {
    /// Name of the database view backing this record.
    const VIEW_NAME: &'static str;
    /// Column used for detail lookups.
    const PRIMARY_KEY: &'static str;
    /// Every exposed column, in declaration order.
    const COLUMNS: &'static [&'static str];

    /// Builds the unfiltered SELECT for this view.
    ///
    /// No `ORDER BY` is added: rows come back in database-native order.
    fn select_all() -> String {
        format!("SELECT {} FROM {}", Self::COLUMNS.join(", "), Self::VIEW_NAME)
    }

    /// Builds the SELECT that fetches a single row by primary key (`$1`).
    fn select_by_key() -> String {
        format!("{} WHERE {} = $1", Self::select_all(), Self::PRIMARY_KEY)
    }
}
