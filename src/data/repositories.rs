use super::RepositoryRecord;

pub(super) static REPOSITORIES: [RepositoryRecord; 57] = [
    repo("microsoft/vscode", "TypeScript", 163000, 28900, 1900, 0.82),
    repo("microsoft/TypeScript", "TypeScript", 100000, 12300, 780, 0.68),
    repo("angular/angular", "TypeScript", 95000, 25200, 1500, 0.58),
    repo("ant-design/ant-design", "TypeScript", 91000, 44500, 2100, 0.72),
    repo("nestjs/nest", "TypeScript", 66000, 7700, 420, 0.89),
    repo("rust-lang/rust", "Rust", 97000, 12500, 3200, 0.91),
    repo("denoland/deno", "Rust", 94000, 5200, 890, 0.95),
    repo("tauri-apps/tauri", "Rust", 82000, 2500, 750, 0.93),
    repo("alacritty/alacritty", "Rust", 55000, 3000, 520, 0.78),
    repo("sharkdp/fd", "Rust", 33000, 800, 210, 0.84),
    repo("golang/go", "Go", 123000, 17600, 2100, 0.67),
    repo("kubernetes/kubernetes", "Go", 110000, 39200, 3800, 0.59),
    repo("moby/moby", "Go", 68000, 18600, 2900, 0.52),
    repo("fatedier/frp", "Go", 84000, 13000, 280, 0.81),
    repo("prometheus/prometheus", "Go", 54000, 9000, 920, 0.69),
    repo("tensorflow/tensorflow", "Python", 185000, 74100, 3100, 0.63),
    repo("python/cpython", "Python", 62000, 29800, 2500, 0.54),
    repo("django/django", "Python", 78000, 31500, 2700, 0.61),
    repo("pallets/flask", "Python", 67000, 16100, 810, 0.58),
    repo("pytorch/pytorch", "Python", 81000, 21800, 3400, 0.75),
    repo("psf/requests", "Python", 52000, 9300, 730, 0.49),
    repo("facebook/react", "JavaScript", 228000, 46600, 1600, 0.71),
    repo("vuejs/vue", "JavaScript", 207000, 33700, 440, 0.64),
    repo("nodejs/node", "JavaScript", 106000, 29000, 3500, 0.56),
    repo("vercel/next.js", "JavaScript", 124000, 26400, 3200, 0.88),
    repo("axios/axios", "JavaScript", 105000, 10800, 460, 0.67),
    repo("mrdoob/three.js", "JavaScript", 101000, 35300, 2100, 0.62),
    repo("torvalds/linux", "C++", 179000, 53200, 27000, 0.41),
    repo("electron/electron", "C++", 113000, 15200, 1100, 0.65),
    repo("opencv/opencv", "C++", 77000, 55700, 1600, 0.58),
    repo("godotengine/godot", "C++", 88000, 20100, 2400, 0.79),
    repo("bitcoin/bitcoin", "C++", 78000, 36000, 1200, 0.47),
    repo("spring-projects/spring-boot", "Java", 74000, 40500, 850, 0.68),
    repo("elastic/elasticsearch", "Java", 69000, 24700, 2100, 0.61),
    repo("iluwatar/java-design-patterns", "Java", 89000, 26100, 420, 0.72),
    repo("ReactiveX/RxJava", "Java", 48000, 7600, 310, 0.53),
    repo("square/retrofit", "Java", 43000, 7300, 380, 0.56),
    repo("rails/rails", "Ruby", 55000, 21500, 5200, 0.48),
    repo("jekyll/jekyll", "Ruby", 49000, 9700, 1100, 0.52),
    repo("discourse/discourse", "Ruby", 41000, 8200, 790, 0.63),
    repo("rapid7/metasploit-framework", "Ruby", 33000, 13700, 920, 0.55),
    repo("laravel/laravel", "PHP", 78000, 24000, 680, 0.71),
    repo("symfony/symfony", "PHP", 29000, 9400, 2900, 0.58),
    repo("composer/composer", "PHP", 28000, 4400, 590, 0.54),
    repo("nextcloud/server", "PHP", 27000, 4000, 1300, 0.66),
    repo("apple/swift", "Swift", 67000, 10300, 1100, 0.62),
    repo("Alamofire/Alamofire", "Swift", 41000, 7500, 320, 0.58),
    repo("vapor/vapor", "Swift", 24000, 1400, 340, 0.74),
    repo("onevcat/Kingfisher", "Swift", 23000, 2600, 190, 0.65),
    repo("JetBrains/kotlin", "Kotlin", 49000, 5700, 450, 0.69),
    repo("square/leakcanary", "Kotlin", 29000, 3900, 180, 0.61),
    repo("google/iosched", "Kotlin", 22000, 6200, 140, 0.54),
    repo("ktorio/ktor", "Kotlin", 13000, 1000, 280, 0.78),
    repo("dotnet/aspnetcore", "C#", 35000, 9900, 1700, 0.66),
    repo("PowerShell/PowerShell", "C#", 44000, 7400, 820, 0.63),
    repo("dotnet/roslyn", "C#", 19000, 4000, 680, 0.58),
    repo("ShareX/ShareX", "C#", 29000, 3200, 140, 0.71),
];

const fn repo(
    name: &'static str,
    language: &'static str,
    stars: u32,
    forks: u32,
    contributors: u32,
    growth: f64,
) -> RepositoryRecord {
    RepositoryRecord {
        name,
        language,
        stars,
        forks,
        contributors,
        growth,
    }
}
