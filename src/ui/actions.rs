use super::{App, MenuEntry, Terminal};
use alas_application::{
    error::{AppError, ErrorKind},
    prelude::*,
};
use alas_core::gateways::{map::MapDocumentFormatter, search::DeliveryOrderSearch};
use std::{
    io::{self, BufRead, Write},
    path::Path,
};

const HELP: &str = "\
1. Correct X&Y            Not available yet.
2. Optimized route        Not available yet.
3. Retrieve coordinates   Enter one or more pallet codes separated by commas.
                          The coordinates of all orders are sorted by their
                          vehicle location and written to two files:
                            coordenadas_<code>.txt        annotated list
                            coordenadas_<code>_clean.txt  plain list
                          Several pallets are written to
                          coordenadas_multiple_<N>_pallets[_clean].txt.
4. Generate HTML map      Enter the path of a clean coordinate file. The map
                          is written next to it with the extension .html.
5. Help                   Show this text.
6. Exit                   Quit the program (also 'q').

The API credentials are read from ALAS_API_USER and ALAS_API_PASSWORD.";

fn hint(kind: ErrorKind) -> &'static str {
    match kind {
        ErrorKind::NoValidInput => "Nothing to do without input.",
        ErrorKind::Connection => "Check your network connection and the API base URL.",
        ErrorKind::ApiStatus => "Check ALAS_API_USER and ALAS_API_PASSWORD.",
        ErrorKind::Transport => "The response was interrupted, please try again.",
        ErrorKind::DecodeFailure => "The API answered with an unexpected format.",
        ErrorKind::EmptyResult => "The file does not contain any valid coordinates.",
        ErrorKind::Io => "Check the permissions of the output directory.",
        ErrorKind::NotFound => "Check the path of the file.",
    }
}

fn report_error<R: BufRead, W: Write>(term: &mut Terminal<R, W>, err: &AppError) -> io::Result<()> {
    log::debug!("{err:?}");
    term.error(&err.to_string())?;
    term.line(hint(err.kind()))
}

fn is_yes(answer: &str) -> bool {
    let answer = answer.trim().to_lowercase();
    matches!(answer.as_str(), "s" | "si" | "sí")
}

pub fn placeholder<R: BufRead, W: Write>(
    term: &mut Terminal<R, W>,
    entry: MenuEntry,
) -> io::Result<()> {
    term.title(entry.label())?;
    term.warning("This feature is not available yet.")
}

pub fn help<R: BufRead, W: Write>(term: &mut Terminal<R, W>) -> io::Result<()> {
    term.title(MenuEntry::Help.label())?;
    term.line(HELP)
}

pub fn retrieve_coordinates<R, W, S, F>(
    term: &mut Terminal<R, W>,
    app: &App<S, F>,
) -> io::Result<()>
where
    R: BufRead,
    W: Write,
    S: DeliveryOrderSearch,
    F: MapDocumentFormatter,
{
    term.title(MenuEntry::RetrieveCoordinates.label())?;
    let Some(input) = term.prompt("Pallet codes (comma separated): ")? else {
        return Ok(());
    };
    let summary = match alas_application::prelude::retrieve_coordinates(
        app.search,
        app.output_dir,
        &input,
    ) {
        Ok(Retrieval::Exported(summary)) => summary,
        Ok(Retrieval::NoOrders) => return term.warning("No orders found for the given pallets."),
        Ok(Retrieval::NoValidCoordinates { total }) => {
            return term.warning(&format!(
                "None of the {total} orders has valid coordinates."
            ));
        }
        Err(err) => return report_error(term, &err),
    };

    term.success(&format!(
        "Retrieved {} coordinates of {} orders on {} pallet(s).",
        summary.count,
        summary.total,
        summary.pallet_codes.len()
    ))?;
    term.line(&format!(
        "Annotated file: {}",
        summary.annotated_file.display()
    ))?;
    if let Some(err) = &summary.clean_file_error {
        return term.warning(&format!(
            "Unable to write {}: {err}",
            summary.clean_file.display()
        ));
    }
    term.line(&format!("Clean file: {}", summary.clean_file.display()))?;

    let Some(answer) = term.prompt("\nGenerate the HTML map now? (s/n): ")? else {
        return Ok(());
    };
    if is_yes(&answer) {
        render_map_file(term, app, &summary.clean_file)?;
    }
    Ok(())
}

pub fn render_map<R, W, S, F>(term: &mut Terminal<R, W>, app: &App<S, F>) -> io::Result<()>
where
    R: BufRead,
    W: Write,
    F: MapDocumentFormatter,
{
    term.title(MenuEntry::RenderMap.label())?;
    let Some(path) = term.prompt("Path of the coordinate file: ")? else {
        return Ok(());
    };
    if path.is_empty() {
        term.error("A file path is required")?;
        return term.line(hint(ErrorKind::NoValidInput));
    }
    render_map_file(term, app, Path::new(&path))
}

fn render_map_file<R, W, S, F>(
    term: &mut Terminal<R, W>,
    app: &App<S, F>,
    source: &Path,
) -> io::Result<()>
where
    R: BufRead,
    W: Write,
    F: MapDocumentFormatter,
{
    match alas_application::prelude::render_map(app.map, source) {
        Ok(MapSummary { html_file, count }) => term.success(&format!(
            "Map with {count} points written to {}",
            html_file.display()
        )),
        Err(err) => report_error(term, &err),
    }
}
