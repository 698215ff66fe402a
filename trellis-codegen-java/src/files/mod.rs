mod accessors_java;

pub use accessors_java::AccessorsJava;
