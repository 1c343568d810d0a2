pub mod typst;
