use foirequest_markup::FoiMessage;

#[derive(FoiMessage)]
struct Message {
    #[message(identifier)]
    id: u64,
}

fn main() {}
