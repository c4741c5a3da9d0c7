//! Pre-built mock runner scenarios for testing.
//!
//! These scenarios register realistic utility output for both platform
//! collectors so tests can exercise full collection runs.

use super::runner::MockRunner;

impl MockRunner {
    /// A typical Linux desktop: Ubuntu, 4-core/8-thread CPU, one NVMe drive
    /// and one spinning disk.
    pub fn typical_linux() -> Self {
        let mut runner = Self::new();

        runner.add_output(
            "lsb_release -a",
            "\
No LSB modules are available.
Distributor ID:\tUbuntu
Description:\tUbuntu 22.04.4 LTS
Release:\t22.04
Codename:\tjammy
",
        );
        runner.add_output("uname -r", "6.5.0-35-generic\n");
        runner.add_output("uname -m", "x86_64\n");
        runner.add_output(
            "free -b",
            "\
               total        used        free      shared  buff/cache   available
Mem:     16706158592  5836912640  2147483648   123456512  8721762304 10240000000
Swap:     2147479552           0  2147479552
",
        );
        runner.add_output(
            "cat /proc/cpuinfo",
            "\
processor\t: 0
vendor_id\t: GenuineIntel
cpu family\t: 6
model\t\t: 165
model name\t: Intel(R) Core(TM) i3-10100 CPU @ 3.60GHz
stepping\t: 3
cpu MHz\t\t: 3600.123
cache size\t: 6144 KB
physical id\t: 0
siblings\t: 8
core id\t\t: 0
cpu cores\t: 4
flags\t\t: fpu vme de pse tsc msr pae mce

processor\t: 1
model name\t: Intel(R) Core(TM) i3-10100 CPU @ 3.60GHz
cpu MHz\t\t: 3600.123
siblings\t: 8
cpu cores\t: 4
",
        );
        runner.add_output(
            "df -B1",
            "\
Filesystem         1B-blocks         Used    Available Use% Mounted on
/dev/nvme0n1p2  502468108288 101937831936 374923280384  22% /
tmpfs             8353079296            0   8353079296   0% /dev/shm
/dev/nvme0n1p1     535805952      6182912    529623040   2% /boot/efi
",
        );
        runner.add_output(
            "lsblk -ndo NAME,SIZE,MODEL",
            "\
nvme0n1 476.9G Samsung SSD 980 PRO 500GB
sda       1.8T WDC WD20EZRZ-00Z5HB0
",
        );

        runner
    }

    /// A typical Windows 11 desktop as reported by `wmic`: two logical
    /// volumes on two physical drives. Output is ASCII, which is valid GBK.
    pub fn typical_windows() -> Self {
        let mut runner = Self::new();

        runner.add_output(
            "wmic os get /all /format:list",
            "\
\r\n\
BootDevice=\\Device\\HarddiskVolume1\r\n\
BuildNumber=22631\r\n\
Caption=Microsoft Windows 11 Pro\r\n\
CSName=DESKTOP-ABC123\r\n\
FreePhysicalMemory=8250080\r\n\
InstallDate=20230412183025.000000+480\r\n\
LastBootUpTime=20240815080102.500000+480\r\n\
LocalDateTime=20240816232957.125000+480\r\n\
OSArchitecture=64-bit\r\n\
RegisteredUser=alice\r\n\
SerialNumber=00330-80000-00000-AA218\r\n\
TotalVisibleMemorySize=16662020\r\n\
Version=10.0.22631\r\n\
",
        );
        runner.add_output(
            "wmic computersystem get model",
            "Model             \r\nMS-7D25           \r\n",
        );
        runner.add_output(
            "wmic cpu get name,NumberOfCores,NumberOfLogicalProcessors,MaxClockSpeed /format:list",
            "\
\r\n\
MaxClockSpeed=3400\r\n\
Name=Intel(R) Core(TM) i7-10700 CPU @ 2.90GHz\r\n\
NumberOfCores=8\r\n\
NumberOfLogicalProcessors=16\r\n\
",
        );
        runner.add_output(
            "wmic logicaldisk get name,size,freespace,description /all /format:list",
            "\
\r\n\
Description=Local Fixed Disk\r\n\
FreeSpace=107374182400\r\n\
Name=C:\r\n\
Size=255060512768\r\n\
\r\n\
Description=Local Fixed Disk\r\n\
FreeSpace=53687091200\r\n\
Name=D:\r\n\
Size=107374182400\r\n\
",
        );
        runner.add_output(
            "wmic diskdrive get name,size,model,caption /all /format:list",
            "\
\r\n\
Caption=Samsung SSD 980 PRO 500GB\r\n\
Model=Samsung SSD 980 PRO 500GB\r\n\
Name=\\\\.\\PHYSICALDRIVE0\r\n\
Size=500105249280\r\n\
\r\n\
Caption=WDC WD20EZRZ-00Z5HB0\r\n\
Model=WDC WD20EZRZ-00Z5HB0\r\n\
Name=\\\\.\\PHYSICALDRIVE1\r\n\
Size=2000396321280\r\n\
",
        );

        runner
    }
}
