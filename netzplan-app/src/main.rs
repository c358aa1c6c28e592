//! Headless overlay driver
//!
//! Wires the netzplan core against the live data sources with a logging
//! render layer instead of a map widget. The initial URL fragment can be
//! passed as the first argument, e.g.
//! `netzplan-app 'bounds=51.02%2C13.62%3B51.09%2C13.85&hide=nextbike'`.

use anyhow::{anyhow, Result};
use netzplan::fragment::viewbounds;
use netzplan::fragment::{FragmentSink, FragmentStore};
use netzplan::prelude::*;
use std::cell::RefCell;
use std::rc::Rc;
use tokio::sync::mpsc;

/// Stands in for the browser url bar: every rewrite is logged.
struct UrlBarLog;

impl FragmentSink for UrlBarLog {
    fn replace(&mut self, fragment: &str) {
        log::info!("fragment -> #{}", fragment);
    }
}

/// Render layer that narrates attach/detach instead of drawing.
struct LogLayer {
    name: &'static str,
}

impl RenderLayer for LogLayer {
    fn attach(&mut self, marker: MarkerId) {
        log::debug!("[{}] attach marker {}", self.name, marker.raw());
    }

    fn detach(&mut self, marker: MarkerId) {
        log::debug!("[{}] detach marker {}", self.name, marker.raw());
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    env_logger::init();

    let options = OverlayOptions::default();
    let initial_fragment = std::env::args().nth(1).unwrap_or_default();

    let mut store = FragmentStore::new(&initial_fragment, Box::new(UrlBarLog));

    // current view; restored from the fragment when possible
    let view = Rc::new(RefCell::new(options.default_bounds.clone()));
    let applied = Rc::clone(&view);
    if let Err(e) = viewbounds::bind_bounds(&mut store, move |bounds| {
        log::info!("view restored from fragment");
        *applied.borrow_mut() = bounds;
    }) {
        log::warn!("keeping default view: {}", e);
    }

    // transit stops for the current view
    let mut handles = 0u64;
    let mut fetched_stops: Vec<StopPin> = Vec::new();
    let mut stop_index = StopIndex::new();
    let mut stop_window = MarkerWindow::new(Box::new(LogLayer { name: "stops" }));
    let transit = TransitPins::new(options.transit.clone());

    let viewport = view.borrow().clone();
    match sync_stop_markers(&transit, &mut stop_index, &mut stop_window, &viewport, |stop| {
        handles += 1;
        fetched_stops.push(stop.clone());
        Marker::new(MarkerId::new(handles), stop.position)
    })
    .await
    {
        Ok(added) => log::info!(
            "{} stops fetched, {} visible",
            added,
            stop_window.active().len()
        ),
        Err(e) => log::warn!("stop fetch failed: {}", e),
    }

    // walk through the popup flow once so the journey form shows up in logs
    if fetched_stops.len() >= 2 {
        let mut selection = StopSelection::new();
        selection.open(fetched_stops[0].clone());
        selection.pin_clicked();
        selection.open(fetched_stops[1].clone());
        if let Some(trip) = selection.trip_to_clicked(chrono::Local::now().naive_local()) {
            log::info!(
                "journey form: {} -> {:?}",
                netzplan::ui::selection::JOURNEY_FORM_URL,
                trip.form_fields()
            );
        }
    }

    // bike-share city; its home bounds are the fallback view
    let feed = Arc::new(BikeshareFeed::new(options.bikeshare.clone()));
    let mut bike_window = MarkerWindow::new(Box::new(LogLayer { name: "bikes" }));

    let city = feed
        .fetch_city()
        .await
        .map_err(|e| anyhow!("bike-share feed unavailable: {}", e))?;
    if store.get_all(viewbounds::BOUNDS_PARAM).is_empty() {
        *view.borrow_mut() = city.bounds.to_bounds();
        let fallback = view.borrow().clone();
        viewbounds::push_bounds(&mut store, &fallback);
    }

    let viewport = view.borrow().clone();
    let created = rebuild_bike_markers(
        &mut bike_window,
        &city.places,
        &options.bikeshare.flex_bike_type,
        &viewport,
        |place| {
            handles += 1;
            Marker::new(MarkerId::new(handles), place.position())
        },
    );
    log::info!(
        "{} bike places shown, {} visible",
        created,
        bike_window.active().len()
    );

    // legend checkboxes, persisted in the `hide` parameter
    let _stops_toggle = LayerToggle::bind(&mut store, "dvb", |checked| {
        log::info!("stop layer {}", if checked { "shown" } else { "hidden" });
    });
    let _bikes_toggle = LayerToggle::bind(&mut store, "nextbike", |checked| {
        log::info!("bike layer {}", if checked { "shown" } else { "hidden" });
    });

    // periodic bike refresh: the task only fetches; results are applied here
    let (tx, mut rx) = mpsc::channel::<BikeCity>(1);
    let refresh_feed = Arc::clone(&feed);
    let _refresh = RefreshTask::spawn(options.refresh.interval, move || {
        let feed = Arc::clone(&refresh_feed);
        let tx = tx.clone();
        Box::pin(async move {
            log::info!("refreshing bike locations...");
            let city = feed.fetch_city().await?;
            let _ = tx.send(city).await;
            Ok(())
        })
    });

    println!("netzplan overlay running; fragment: #{}", store.fragment());
    println!(
        "  view: {:?} .. {:?}",
        view.borrow().south_west,
        view.borrow().north_east
    );
    println!(
        "  stops: {} known / bikes: {} markers (ctrl-c to exit)",
        stop_index.len(),
        bike_window.len()
    );

    loop {
        tokio::select! {
            _ = tokio::signal::ctrl_c() => break,
            Some(city) = rx.recv() => {
                let viewport = view.borrow().clone();
                let created = rebuild_bike_markers(
                    &mut bike_window,
                    &city.places,
                    &options.bikeshare.flex_bike_type,
                    &viewport,
                    |place| {
                        handles += 1;
                        Marker::new(MarkerId::new(handles), place.position())
                    },
                );
                log::info!("refresh applied: {} bike places", created);
            }
        }
    }

    Ok(())
}
