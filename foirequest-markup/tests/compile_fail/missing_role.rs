use foirequest_markup::FoiRequest;

#[derive(FoiRequest)]
struct Request {
    #[foirequest(id)]
    id: u64,
    #[foirequest(same_as)]
    same_as: Option<u64>,
    description: String,
}

fn main() {}
