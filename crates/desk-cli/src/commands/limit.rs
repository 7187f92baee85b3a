use desk_core::views::DashboardViews;

/// Leading `limit` rows of a view, or all of them without a limit.
#[must_use]
pub fn limited<T>(rows: &[T], limit: Option<u32>) -> &[T] {
    let Some(limit) = limit else {
        return rows;
    };
    let keep = usize::try_from(limit).unwrap_or(usize::MAX).min(rows.len());
    &rows[..keep]
}

/// Copy of `views` with every row view cut to `limit`. The summary keeps the
/// full counts.
#[must_use]
pub fn limit_views(views: &DashboardViews, limit: Option<u32>) -> DashboardViews {
    DashboardViews {
        rooms: limited(&views.rooms, limit).to_vec(),
        guests: limited(&views.guests, limit).to_vec(),
        reservations: limited(&views.reservations, limit).to_vec(),
        feed: limited(&views.feed, limit).to_vec(),
        hotels: limited(&views.hotels, limit).to_vec(),
        ..views.clone()
    }
}
