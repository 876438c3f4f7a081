use chrono::{TimeZone, Utc};
use criterion::{Criterion, criterion_group, criterion_main};
use sunside::{Coordinate, Route, RouteExposureAnalyzer, SpaSolarProvider};
use tokio::runtime::Runtime;

/// A winding northbound route with `points` coordinates.
fn synthetic_route(points: usize) -> Route {
    let coordinates = (0..points)
        .map(|i| {
            Coordinate::new(
                48.0 + i as f64 * 0.002,
                11.0 + (i as f64 * 0.37).sin() * 0.01,
            )
        })
        .collect();
    Route {
        coordinates,
        distance_meters: 250_000.0,
        duration_seconds: 9_000.0,
    }
}

fn bench(c: &mut Criterion) {
    let rt = Runtime::new().unwrap();
    let analyzer = RouteExposureAnalyzer::new(SpaSolarProvider::new());
    let route = synthetic_route(1000);
    let departure = Utc.with_ymd_and_hms(2024, 6, 21, 10, 0, 0).unwrap();

    c.bench_function("route_exposure_analyzer.analyze_at", |b| {
        b.iter(|| {
            rt.block_on(async {
                analyzer.analyze_at(&route, departure).await.unwrap();
            });
        });
    });
}

criterion_group!(benches, bench);
criterion_main!(benches);
