//! The landing page with the entry form and the page listing every record.

use axum::{
    extract::State,
    response::{IntoResponse, Response},
};
use axum_extra::extract::PrivateCookieJar;
use maud::{Markup, html};

use crate::{
    AppState, Error,
    alert::{Alert, take_notice},
    endpoints,
    html::{
        BUTTON_PRIMARY_STYLE, FORM_CONTAINER_STYLE, FORM_GRID_STYLE, FORM_LABEL_STYLE,
        FORM_TEXT_INPUT_STYLE, LINK_STYLE, PAGE_CONTAINER_STYLE, TABLE_CELL_STYLE,
        TABLE_HEADER_STYLE, TABLE_NUMBER_CELL_STYLE, TABLE_ROW_STYLE, TABLE_STYLE, base,
        labelled_input, link,
    },
    navigation::NavBar,
    record::{TransportationRecord, list_all_records, list_latest_records},
};

/// How many records the landing page shows.
pub const LATEST_RECORDS_LIMIT: u32 = 10;

/// Render the landing page: the entry form, any pending notice and the latest records.
pub async fn get_index_page(
    State(state): State<AppState>,
    jar: PrivateCookieJar,
) -> Result<Response, Error> {
    let records = {
        let connection = state
            .db_connection
            .lock()
            .inspect_err(|error| tracing::error!("could not acquire database lock: {error}"))
            .map_err(|_| Error::DatabaseLockError)?;

        list_latest_records(LATEST_RECORDS_LIMIT, &connection)
            .inspect_err(|error| tracing::error!("Failed to retrieve latest records: {error}"))?
    };

    let (jar, notice) = take_notice(jar);

    Ok((jar, index_view(notice, &records)).into_response())
}

/// Render every record, newest first.
pub async fn get_records_page(
    State(state): State<AppState>,
    jar: PrivateCookieJar,
) -> Result<Response, Error> {
    let records = {
        let connection = state
            .db_connection
            .lock()
            .inspect_err(|error| tracing::error!("could not acquire database lock: {error}"))
            .map_err(|_| Error::DatabaseLockError)?;

        list_all_records(&connection)
            .inspect_err(|error| tracing::error!("Failed to retrieve records: {error}"))?
    };

    let (jar, notice) = take_notice(jar);

    Ok((jar, records_view(notice, &records)).into_response())
}

fn index_view(notice: Option<Alert>, records: &[TransportationRecord]) -> Markup {
    let nav_bar = NavBar::new(endpoints::ROOT).into_html();

    let content = html!(
        (nav_bar)

        main class=(PAGE_CONTAINER_STYLE)
        {
            @if let Some(notice) = notice {
                (notice.into_html())
            }

            section class=(FORM_CONTAINER_STYLE)
            {
                h1 { "Log a Trip" }

                (record_form_view())
            }

            section
            {
                header class="section-header"
                {
                    h2 { "Latest Records" }

                    (link(endpoints::RECORDS_VIEW, "View all records"))
                }

                (records_table_view(records, false))
            }
        }
    );

    base("New Record", &content)
}

fn records_view(notice: Option<Alert>, records: &[TransportationRecord]) -> Markup {
    let nav_bar = NavBar::new(endpoints::RECORDS_VIEW).into_html();

    let content = html!(
        (nav_bar)

        main class=(PAGE_CONTAINER_STYLE)
        {
            @if let Some(notice) = notice {
                (notice.into_html())
            }

            section
            {
                header class="section-header"
                {
                    h1 { "All Records" }

                    a href=(endpoints::EXPORT) class=(LINK_STYLE) download { "Export CSV" }
                }

                (records_table_view(records, true))
            }
        }
    );

    base("All Records", &content)
}

fn record_form_view() -> Markup {
    html! {
        form
            method="post"
            action=(endpoints::SUBMIT)
            class=(FORM_GRID_STYLE)
        {
            (labelled_input("user_name", "Name", "text", true))
            (labelled_input("travel_date", "Travel Date", "date", true))
            (labelled_input("mode", "Mode", "text", true))
            (labelled_input("origin", "Origin", "text", true))
            (labelled_input("destination", "Destination", "text", true))
            (labelled_input("distance_km", "Distance (km)", "number", true))
            (labelled_input("cost", "Cost", "number", true))

            div class="form-wide"
            {
                label for="notes" class=(FORM_LABEL_STYLE) { "Notes" }

                textarea id="notes" name="notes" rows="3" class=(FORM_TEXT_INPUT_STYLE) {}
            }

            button type="submit" class=(BUTTON_PRIMARY_STYLE) { "Save Record" }
        }
    }
}

fn records_table_view(records: &[TransportationRecord], show_created_at: bool) -> Markup {
    let column_count = if show_created_at { 10 } else { 9 };

    html!(
        table class=(TABLE_STYLE)
        {
            thead class=(TABLE_HEADER_STYLE)
            {
                tr
                {
                    th scope="col" class=(TABLE_CELL_STYLE) { "ID" }
                    th scope="col" class=(TABLE_CELL_STYLE) { "Name" }
                    th scope="col" class=(TABLE_CELL_STYLE) { "Date" }
                    th scope="col" class=(TABLE_CELL_STYLE) { "Mode" }
                    th scope="col" class=(TABLE_CELL_STYLE) { "Origin" }
                    th scope="col" class=(TABLE_CELL_STYLE) { "Destination" }
                    th scope="col" class=(TABLE_NUMBER_CELL_STYLE) { "Distance (km)" }
                    th scope="col" class=(TABLE_NUMBER_CELL_STYLE) { "Cost" }
                    th scope="col" class=(TABLE_CELL_STYLE) { "Notes" }

                    @if show_created_at {
                        th scope="col" class=(TABLE_CELL_STYLE) { "Created (UTC)" }
                    }
                }
            }

            tbody
            {
                @for record in records {
                    tr class=(TABLE_ROW_STYLE) data-record-id=(record.id)
                    {
                        td class=(TABLE_CELL_STYLE) { (record.id) }
                        td class=(TABLE_CELL_STYLE) { (record.user_name) }
                        td class=(TABLE_CELL_STYLE) { (record.travel_date) }
                        td class=(TABLE_CELL_STYLE) { (record.mode) }
                        td class=(TABLE_CELL_STYLE) { (record.origin) }
                        td class=(TABLE_CELL_STYLE) { (record.destination) }
                        td class=(TABLE_NUMBER_CELL_STYLE) { (record.distance_km) }
                        td class=(TABLE_NUMBER_CELL_STYLE) { (format!("{:.2}", record.cost)) }
                        td class=(TABLE_CELL_STYLE) { (record.notes) }

                        @if show_created_at {
                            td class=(TABLE_CELL_STYLE) { (record.created_at_text()) }
                        }
                    }
                }

                @if records.is_empty() {
                    tr
                    {
                        td colspan=(column_count) class="table-empty"
                        {
                            "No records yet. "
                            (link(endpoints::ROOT, "Log your first trip"))
                        }
                    }
                }
            }
        }
    )
}
