mod classification;
mod conversion;
mod serialization;
