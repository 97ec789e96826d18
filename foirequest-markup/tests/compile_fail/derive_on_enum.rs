use foirequest_markup::FoiMessage;

#[derive(FoiMessage)]
enum Message {
    Sent { id: u64 },
    Received { id: u64 },
}

fn main() {}
