use lookalike::components::App;

fn main() {
    dioxus::launch(App);
}
