fn main() {
    // 调色板数据通过 include_str! 编译进二进制，修改后需要重新编译
    println!("cargo:rerun-if-changed=data/colour_data.json");
}
