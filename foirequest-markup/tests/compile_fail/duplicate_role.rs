use foirequest_markup::{FoiMessage, FoiRequest};

#[derive(FoiRequest)]
struct Request {
    #[foirequest(id)]
    id: u64,
    #[foirequest(same_as)]
    same_as: Option<u64>,
    #[foirequest(description)]
    description: String,
}

#[derive(FoiMessage)]
struct Message {
    #[message(id)]
    id: u64,
    #[message(content)]
    content: String,
    #[message(content)]
    plaintext: String,
    #[message(request)]
    request: Request,
}

fn main() {}
