use criterion::{BenchmarkId, Criterion, black_box, criterion_group, criterion_main};
use digitpad_rs::digit_pipeline::{
    DigitClassifier, DigitPipeline, InputTensor, PipelineConfig, RawBitmap, Result, ResizeFilter,
    ScoreVector,
};

struct ConstantClassifier;

impl DigitClassifier for ConstantClassifier {
    fn infer(&self, _tensor: &InputTensor) -> Result<ScoreVector> {
        let mut scores = vec![0.0; 10];
        scores[5] = 1.0;
        Ok(scores)
    }
}

fn generate_mock_canvas(width: u32, height: u32) -> RawBitmap {
    let mut data = Vec::with_capacity(width as usize * height as usize * 4);
    for y in 0..height {
        for x in 0..width {
            let value = ((x + y) % 256) as u8;
            data.extend_from_slice(&[value, value, value, 255]);
        }
    }
    RawBitmap::new(width, height, data).unwrap()
}

fn benchmark_preprocess_sizes(c: &mut Criterion) {
    let mut group = c.benchmark_group("preprocess_by_canvas_size");

    let sizes = vec![
        (140, "140x140"),
        (280, "280x280"),
        (560, "560x560"),
    ];

    for (size, label) in sizes {
        let canvas = generate_mock_canvas(size, size);

        group.bench_with_input(BenchmarkId::from_parameter(label), &canvas, |b, canvas| {
            let pipeline: DigitPipeline<ConstantClassifier> =
                DigitPipeline::pending(PipelineConfig::default());

            b.iter(|| {
                let _ = pipeline.preprocess(black_box(canvas));
            });
        });
    }

    group.finish();
}

fn benchmark_resize_filters(c: &mut Criterion) {
    let mut group = c.benchmark_group("resize_filters");
    let canvas = generate_mock_canvas(280, 280);

    let filters = vec![
        (ResizeFilter::Nearest, "nearest"),
        (ResizeFilter::Bilinear, "bilinear"),
        (ResizeFilter::Lanczos3, "lanczos3"),
    ];

    for (filter, label) in filters {
        group.bench_with_input(BenchmarkId::from_parameter(label), &canvas, |b, canvas| {
            let config = PipelineConfig::builder().filter(filter).build();
            let pipeline: DigitPipeline<ConstantClassifier> = DigitPipeline::pending(config);

            b.iter(|| {
                let _ = pipeline.preprocess(black_box(canvas));
            });
        });
    }

    group.finish();
}

fn benchmark_full_classify(c: &mut Criterion) {
    let canvas = generate_mock_canvas(280, 280);
    let pipeline = DigitPipeline::with_classifier(ConstantClassifier, PipelineConfig::default());

    c.bench_function("classify_280x280_mock_model", |b| {
        b.iter(|| {
            let _ = pipeline.classify(black_box(&canvas));
        });
    });
}

criterion_group!(
    benches,
    benchmark_preprocess_sizes,
    benchmark_resize_filters,
    benchmark_full_classify
);
criterion_main!(benches);
