pub use decompose_inp_shared_kernel::value_objects::*;
