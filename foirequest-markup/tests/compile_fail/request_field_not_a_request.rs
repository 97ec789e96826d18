use foirequest_markup::FoiMessage;

#[derive(FoiMessage)]
struct Message {
    #[message(id)]
    id: u64,
    #[message(content)]
    content: String,
    #[message(real_content)]
    real_content: String,
    #[message(request)]
    request: String,
}

fn main() {}
