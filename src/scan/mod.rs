pub(crate) mod scanner;
