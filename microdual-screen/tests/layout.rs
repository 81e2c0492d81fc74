use microdual_screen::{Network, PlotLayout, Reaction};

const REACTION_NAMES: [&str; 35] = [
    "he4_he4", "he4_be8", "c12_he4", "c12_c12", "c12_o16", "o16_o16", "o16_he4", "ne20_he4",
    "mg24_he4", "al27_p", "si28_he4", "p31_p", "s32_he4", "cl35_p", "ar36_he4", "k39_p",
    "ca40_he4", "sc43_p", "ti44_he4", "v47_p", "cr48_he4", "mn51_p", "fe52_he4", "co55_p",
    "fe54_p", "fe54_he4", "fe56_p", "d_p", "p_p", "he3_he3", "he3_he4", "c12_p", "n14_p",
    "o16_p", "n14_he4",
];

#[test]
fn varnames_in_canonical_order() {
    let net = Network::aprox21();
    let layout = PlotLayout::init_variables(net.num_species());
    let names = layout.varnames(&net);

    let mut expected = vec!["density".to_string(), "temperature".to_string()];
    expected.extend(net.species().iter().map(|s| format!("X_{}", s.short_name)));
    expected.extend(REACTION_NAMES.iter().map(|r| format!("scn_{}", r)));
    expected.extend(REACTION_NAMES.iter().map(|r| format!("scn_{}_dt", r)));

    assert_eq!(names, expected);
}

#[test]
fn reaction_names_follow_layout_order() {
    let names: Vec<_> = Reaction::ALL.iter().map(|r| r.name()).collect();
    assert_eq!(names, REACTION_NAMES);
}

#[test]
fn indices_are_dense() {
    let net = Network::aprox21();
    let layout = PlotLayout::init_variables(net.num_species());
    assert_eq!(layout.n_plot_comps(), 2 + 21 + 2 * 35);

    let mut seen = vec![0u32; layout.n_plot_comps()];
    seen[layout.irho] += 1;
    seen[layout.itemp] += 1;
    for n in 0..layout.num_spec() {
        seen[layout.ispec + n] += 1;
    }
    for r in Reaction::ALL {
        let slot = layout.slot(r);
        seen[slot.value] += 1;
        seen[slot.dt] += 1;
    }
    assert!(seen.iter().all(|&c| c == 1), "{:?}", seen);
}

#[test]
fn fixed_order_of_groups() {
    let layout = PlotLayout::init_variables(21);
    assert_eq!((layout.irho, layout.itemp, layout.ispec), (0, 1, 2));
    assert_eq!(layout.slot(Reaction::He4He4).value, 23);
    assert_eq!(layout.slot(Reaction::N14He4).value, 23 + 34);
    assert_eq!(layout.slot(Reaction::He4He4).dt, 23 + 35);
    assert_eq!(layout.slot(Reaction::N14He4).dt, 23 + 69);
}

#[test]
fn next_index_advances_counter() {
    let mut layout = PlotLayout::init_variables(0);
    let before = layout.n_plot_comps();
    assert_eq!(layout.next_index(3), before);
    assert_eq!(layout.next_index(1), before + 3);
    assert_eq!(layout.n_plot_comps(), before + 4);
}

#[test]
#[should_panic(expected = "layout built for")]
fn varnames_reject_mismatched_network() {
    let layout = PlotLayout::init_variables(5);
    layout.varnames(&Network::aprox21());
}
