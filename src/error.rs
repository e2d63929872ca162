use failure::Fail;

#[derive(Debug, Fail, Clone, PartialEq, Eq)]
pub enum Error {
  #[fail(
    display = "ROM image truncated: {} bytes, header needs at least {}",
    len, required
  )]
  TruncatedImage { len: usize, required: usize },
}

pub type Result<T> = std::result::Result<T, Error>;
