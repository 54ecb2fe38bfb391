mod arff_file_stream;

pub use arff_file_stream::ArffFileStream;
