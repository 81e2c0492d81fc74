use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use microdual_screen::{
    Network, PlotLayout, Screen5, ScreeningConfig, ScreeningKernel, WeakScreening,
};
use ndarray::Array4;

fn bench_kernel(c: &mut Criterion) {
    let net = Network::aprox21();
    let layout = PlotLayout::init_variables(net.num_species());
    let mut group = c.benchmark_group("screen_kernel");

    for n_cell in [4, 8, 16] {
        let cfg = ScreeningConfig {
            n_cell,
            ..ScreeningConfig::default()
        };
        let bx = cfg.index_box();
        let spacing = cfg.spacing();
        let [nx, ny, nz] = bx.shape();
        let mut sp = Array4::zeros((nx, ny, nz, layout.n_plot_comps()));

        let screen5 = ScreeningKernel::new(&net, Screen5, &layout, cfg.origin()).unwrap();
        group.bench_with_input(BenchmarkId::new("screen5", n_cell), &bx, |b, bx| {
            b.iter(|| screen5.evaluate(bx, &spacing, sp.view_mut()))
        });

        let weak = ScreeningKernel::new(&net, WeakScreening, &layout, cfg.origin()).unwrap();
        group.bench_with_input(BenchmarkId::new("weak", n_cell), &bx, |b, bx| {
            b.iter(|| weak.evaluate(bx, &spacing, sp.view_mut()))
        });
    }
    group.finish();
}

criterion_group!(benches, bench_kernel);
criterion_main!(benches);
