mod boxed;
mod btreemap;
mod string;
mod vec;
