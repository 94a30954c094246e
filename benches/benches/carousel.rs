// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Benchmarks for `understory_carousel` event handling.

use criterion::{
    BatchSize, BenchmarkId, Criterion, Throughput, black_box, criterion_group, criterion_main,
};
use kurbo::Point;
use understory_carousel::{Carousel, CarouselEvent, CarouselOptions, EventQueue, PointerKind};

fn bench_navigate_and_settle(c: &mut Criterion) {
    let mut group = c.benchmark_group("carousel/navigate");

    for slides in [2usize, 16, 1_024] {
        group.throughput(Throughput::Elements(1_000));
        group.bench_with_input(BenchmarkId::new("next_settle", slides), &slides, |b, &n| {
            b.iter_batched(
                || Carousel::new(n, CarouselOptions::default(), 0).unwrap(),
                |mut carousel| {
                    for _ in 0..1_000 {
                        let _ = carousel.next();
                        let _ = carousel.transition_end();
                    }
                    black_box(carousel.render());
                },
                BatchSize::SmallInput,
            );
        });
    }

    group.finish();
}

fn bench_drag_follow(c: &mut Criterion) {
    let mut group = c.benchmark_group("carousel/drag");

    // One press, many moves, one release: the per-frame path while a finger
    // is on the track.
    for moves in [16usize, 256] {
        group.throughput(Throughput::Elements(moves as u64));
        group.bench_with_input(BenchmarkId::new("follow", moves), &moves, |b, &moves| {
            b.iter_batched(
                || {
                    let mut carousel = Carousel::new(8, CarouselOptions::default(), 0).unwrap();
                    let _ = carousel.set_track_width(1_280.0);
                    carousel
                },
                |mut carousel| {
                    let kind = PointerKind::Touch;
                    let _ = carousel.handle(CarouselEvent::PointerDown {
                        pos: Point::new(640.0, 0.0),
                        kind,
                    });
                    for i in 0..moves {
                        let _ = carousel.handle(CarouselEvent::PointerMove {
                            pos: Point::new(640.0 - i as f64, 0.0),
                            kind,
                        });
                        black_box(carousel.render());
                    }
                    let _ = carousel.handle(CarouselEvent::PointerUp { pos: None, kind });
                    black_box(carousel);
                },
                BatchSize::SmallInput,
            );
        });
    }

    group.finish();
}

fn bench_queue_drain(c: &mut Criterion) {
    let mut group = c.benchmark_group("carousel/queue");

    // Mixed timer, navigation and settle traffic, most of it dropped by the
    // in-flight guard.
    let events: Vec<CarouselEvent> = (0..512u64)
        .map(|i| match i % 4 {
            0 => CarouselEvent::Tick { now_ms: i * 100 },
            1 => CarouselEvent::Next,
            2 => CarouselEvent::Goto((i as usize % 5) + 1),
            _ => CarouselEvent::TransitionEnd,
        })
        .collect();
    group.throughput(Throughput::Elements(events.len() as u64));

    group.bench_function("drain_mixed", |b| {
        b.iter_batched(
            || {
                let opts = CarouselOptions::default().with_autoplay_interval_ms(250);
                let carousel = Carousel::new(5, opts, 0).unwrap();
                let mut queue = EventQueue::new();
                queue.extend(events.iter().copied());
                (carousel, queue)
            },
            |(mut carousel, mut queue)| {
                black_box(carousel.drain(&mut queue));
            },
            BatchSize::SmallInput,
        );
    });

    group.finish();
}

criterion_group!(
    benches,
    bench_navigate_and_settle,
    bench_drag_follow,
    bench_queue_drain
);
criterion_main!(benches);
