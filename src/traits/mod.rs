pub mod grad_array_ops;
pub mod num_traits_impls;
pub mod std_ops;
