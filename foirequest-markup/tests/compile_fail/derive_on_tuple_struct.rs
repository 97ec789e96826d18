use foirequest_markup::FoiRequest;

#[derive(FoiRequest)]
struct Request(#[foirequest(id)] u64, String);

fn main() {}
